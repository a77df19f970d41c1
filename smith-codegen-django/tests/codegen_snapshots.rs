//! Snapshot tests for Django code generation.
//!
//! These tests verify that the generated Python matches expected output.
//! Run `cargo insta review` to update snapshots when making intentional changes.

use std::str::FromStr;

use modelsmith_codegen::{ArtifactKind, Backend, RenderContext};
use modelsmith_codegen_django::DjangoBackend;
use modelsmith_ir::BackendKind;
use modelsmith_manifest::Manifest;

const ROCKETS: &str = r#"
[[models]]
name = "RocketEngine"
backends = ["django"]

[[models.fields]]
name = "name"
type = "str"
max_length = 32
title = "engine_name"

[[models.fields]]
name = "manufacturer"
type = "str"
required = false

[[models.fields]]
name = "power_cycle"
type = "str"
required = false
default = "gas-generator"

[[models]]
name = "LaunchVehicle"
backends = ["django"]

[[models.fields]]
name = "name"
type = "str"

[[models.fields]]
name = "engine"
type = "str"
options = { foreign_key = "RocketEngine", related_name = "vehicles" }

[[models.fields]]
name = "payload_kg"
type = "float"
required = false
"#;

/// Render one artifact for every Django model of a manifest.
fn render(manifest_toml: &str, artifact: ArtifactKind) -> String {
    let manifest = Manifest::from_str(manifest_toml).expect("Failed to parse manifest");
    let schema = manifest.schema_models();
    let group: Vec<_> = schema
        .iter()
        .filter(|m| m.targets(BackendKind::Django))
        .collect();

    let backend = DjangoBackend::new();
    let models = backend.assemble(&group).expect("Failed to assemble");
    let ctx = RenderContext::new(BackendKind::Django, artifact, &models);
    backend.templates().render(&ctx).expect("Failed to render")
}

#[test]
fn test_models_py() {
    let text = render(ROCKETS, ArtifactKind::Models);

    insta::assert_snapshot!(text, @r"
# Generated by modelsmith. Do not edit by hand.
from django.db import models


class RocketEngine(models.Model):
    name = models.CharField(max_length=32, verbose_name='engine_name')
    manufacturer = models.CharField(null=True, max_length=64)
    power_cycle = models.CharField(default='gas-generator', null=True, max_length=64)


class LaunchVehicle(models.Model):
    name = models.CharField(max_length=64)
    engine = models.ForeignKey('RocketEngine', on_delete=models.CASCADE, related_name='vehicles')
    payload_kg = models.FloatField(null=True)
");
}

#[test]
fn test_serializers_py() {
    let text = render(ROCKETS, ArtifactKind::Serializers);

    insta::assert_snapshot!(text, @r"
# Generated by modelsmith. Do not edit by hand.
from rest_framework import serializers

from .models import RocketEngine, LaunchVehicle


class RocketEngineSerializer(serializers.ModelSerializer):
    class Meta:
        model = RocketEngine
        fields = ['id', 'name', 'manufacturer', 'power_cycle']


class LaunchVehicleSerializer(serializers.ModelSerializer):
    class Meta:
        model = LaunchVehicle
        fields = ['id', 'name', 'engine', 'payload_kg']
");
}

#[test]
fn test_views_class_py() {
    let text = render(ROCKETS, ArtifactKind::ViewsClass);

    insta::assert_snapshot!(text, @r"
# Generated by modelsmith. Do not edit by hand.
from rest_framework import generics

from .models import RocketEngine, LaunchVehicle
from .serializers import RocketEngineSerializer, LaunchVehicleSerializer


class RocketEngineList(generics.ListCreateAPIView):
    queryset = RocketEngine.objects.all()
    serializer_class = RocketEngineSerializer


class RocketEngineDetail(generics.RetrieveUpdateDestroyAPIView):
    queryset = RocketEngine.objects.all()
    serializer_class = RocketEngineSerializer


class LaunchVehicleList(generics.ListCreateAPIView):
    queryset = LaunchVehicle.objects.all()
    serializer_class = LaunchVehicleSerializer


class LaunchVehicleDetail(generics.RetrieveUpdateDestroyAPIView):
    queryset = LaunchVehicle.objects.all()
    serializer_class = LaunchVehicleSerializer
");
}

#[test]
fn test_urls_class_py() {
    let text = render(ROCKETS, ArtifactKind::UrlsClass);

    insta::assert_snapshot!(text, @r"
# Generated by modelsmith. Do not edit by hand.
from django.urls import path

from . import views_class

urlpatterns = [
    path('rocket_engine/', views_class.RocketEngineList.as_view()),
    path('rocket_engine/<int:pk>/', views_class.RocketEngineDetail.as_view()),
    path('launch_vehicle/', views_class.LaunchVehicleList.as_view()),
    path('launch_vehicle/<int:pk>/', views_class.LaunchVehicleDetail.as_view()),
]
");
}

#[test]
fn test_views_func_py() {
    let text = render(ROCKETS, ArtifactKind::ViewsFunc);

    insta::assert_snapshot!(text, @r"
# Generated by modelsmith. Do not edit by hand.
from rest_framework import status
from rest_framework.decorators import api_view
from rest_framework.response import Response

from .models import RocketEngine, LaunchVehicle
from .serializers import RocketEngineSerializer, LaunchVehicleSerializer


@api_view(['GET', 'POST'])
def rocket_engine_list(request):
    if request.method == 'GET':
        items = RocketEngine.objects.all()
        serializer = RocketEngineSerializer(items, many=True)
        return Response(serializer.data)

    serializer = RocketEngineSerializer(data=request.data)
    if serializer.is_valid():
        serializer.save()
        return Response(serializer.data, status=status.HTTP_201_CREATED)
    return Response(serializer.errors, status=status.HTTP_400_BAD_REQUEST)


@api_view(['GET', 'PUT', 'DELETE'])
def rocket_engine_detail(request, pk):
    try:
        item = RocketEngine.objects.get(pk=pk)
    except RocketEngine.DoesNotExist:
        return Response(status=status.HTTP_404_NOT_FOUND)

    if request.method == 'GET':
        serializer = RocketEngineSerializer(item)
        return Response(serializer.data)

    if request.method == 'PUT':
        serializer = RocketEngineSerializer(item, data=request.data)
        if serializer.is_valid():
            serializer.save()
            return Response(serializer.data)
        return Response(serializer.errors, status=status.HTTP_400_BAD_REQUEST)

    item.delete()
    return Response(status=status.HTTP_204_NO_CONTENT)


@api_view(['GET', 'POST'])
def launch_vehicle_list(request):
    if request.method == 'GET':
        items = LaunchVehicle.objects.all()
        serializer = LaunchVehicleSerializer(items, many=True)
        return Response(serializer.data)

    serializer = LaunchVehicleSerializer(data=request.data)
    if serializer.is_valid():
        serializer.save()
        return Response(serializer.data, status=status.HTTP_201_CREATED)
    return Response(serializer.errors, status=status.HTTP_400_BAD_REQUEST)


@api_view(['GET', 'PUT', 'DELETE'])
def launch_vehicle_detail(request, pk):
    try:
        item = LaunchVehicle.objects.get(pk=pk)
    except LaunchVehicle.DoesNotExist:
        return Response(status=status.HTTP_404_NOT_FOUND)

    if request.method == 'GET':
        serializer = LaunchVehicleSerializer(item)
        return Response(serializer.data)

    if request.method == 'PUT':
        serializer = LaunchVehicleSerializer(item, data=request.data)
        if serializer.is_valid():
            serializer.save()
            return Response(serializer.data)
        return Response(serializer.errors, status=status.HTTP_400_BAD_REQUEST)

    item.delete()
    return Response(status=status.HTTP_204_NO_CONTENT)
");
}

#[test]
fn test_urls_func_py() {
    let text = render(ROCKETS, ArtifactKind::UrlsFunc);

    insta::assert_snapshot!(text, @r"
# Generated by modelsmith. Do not edit by hand.
from django.urls import path

from . import views_func

urlpatterns = [
    path('rocket_engine/', views_func.rocket_engine_list),
    path('rocket_engine/<int:pk>/', views_func.rocket_engine_detail),
    path('launch_vehicle/', views_func.launch_vehicle_list),
    path('launch_vehicle/<int:pk>/', views_func.launch_vehicle_detail),
]
");
}

#[test]
fn test_many_to_many_and_primary_key() {
    let text = render(
        r#"
        [[models]]
        name = "Mission"
        backends = ["django"]

        [[models.fields]]
        name = "code"
        type = "str"
        options = { primary_key = true }

        [[models.fields]]
        name = "crew"
        type = "str"
        required = false
        options = { many_key = "Astronaut" }
        "#,
        ArtifactKind::Models,
    );

    assert!(text.contains("code = models.CharField(primary_key=True, max_length=64)\n"));
    assert!(text.contains("crew = models.ManyToManyField('Astronaut')\n"));
}
